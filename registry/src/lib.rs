use std::sync::Arc;

use adapter::redis::RedisClient;
use adapter::repository::{
    auth::AuthRepositoryImpl, availability::AvailabilityRepositoryImpl,
    booking_request::BookingRequestRepositoryImpl, client::ClientRepositoryImpl,
    health::HealthCheckRepositoryImpl, payment::PaymentRepositoryImpl,
    reservation::ReservationRepositoryImpl, service::ServiceRepositoryImpl,
    space::SpaceRepositoryImpl, user::UserRepositoryImpl,
};
use adapter::database::ConnectionPool;
use kernel::repository::{
    auth::AuthRepository, availability::AvailabilityRepository,
    booking_request::BookingRequestRepository, client::ClientRepository,
    health::HealthCheckRepository, payment::PaymentRepository,
    reservation::ReservationRepository, service::ServiceRepository, space::SpaceRepository,
    user::UserRepository,
};
use shared::config::AppConfig;

#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    auth_repository: Arc<dyn AuthRepository>,
    user_repository: Arc<dyn UserRepository>,
    client_repository: Arc<dyn ClientRepository>,
    space_repository: Arc<dyn SpaceRepository>,
    service_repository: Arc<dyn ServiceRepository>,
    reservation_repository: Arc<dyn ReservationRepository>,
    payment_repository: Arc<dyn PaymentRepository>,
    availability_repository: Arc<dyn AvailabilityRepository>,
    booking_request_repository: Arc<dyn BookingRequestRepository>,
}

impl AppRegistry {
    pub fn new(
        pool: ConnectionPool,
        redis_client: Arc<RedisClient>,
        app_config: &AppConfig,
    ) -> Self {
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(pool.clone()));
        let auth_repository = Arc::new(AuthRepositoryImpl::new(
            pool.clone(),
            redis_client.clone(),
            app_config.auth.ttl,
        ));
        let user_repository = Arc::new(UserRepositoryImpl::new(pool.clone()));
        let client_repository = Arc::new(ClientRepositoryImpl::new(pool.clone()));
        let space_repository = Arc::new(SpaceRepositoryImpl::new(pool.clone()));
        let service_repository = Arc::new(ServiceRepositoryImpl::new(pool.clone()));
        let reservation_repository = Arc::new(ReservationRepositoryImpl::new(pool.clone()));
        let payment_repository = Arc::new(PaymentRepositoryImpl::new(pool.clone()));
        let availability_repository = Arc::new(AvailabilityRepositoryImpl::new(pool.clone()));
        let booking_request_repository = Arc::new(BookingRequestRepositoryImpl::new(pool.clone()));
        Self {
            health_check_repository,
            auth_repository,
            user_repository,
            client_repository,
            space_repository,
            service_repository,
            reservation_repository,
            payment_repository,
            availability_repository,
            booking_request_repository,
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn auth_repository(&self) -> Arc<dyn AuthRepository> {
        self.auth_repository.clone()
    }

    pub fn user_repository(&self) -> Arc<dyn UserRepository> {
        self.user_repository.clone()
    }

    pub fn client_repository(&self) -> Arc<dyn ClientRepository> {
        self.client_repository.clone()
    }

    pub fn space_repository(&self) -> Arc<dyn SpaceRepository> {
        self.space_repository.clone()
    }

    pub fn service_repository(&self) -> Arc<dyn ServiceRepository> {
        self.service_repository.clone()
    }

    pub fn reservation_repository(&self) -> Arc<dyn ReservationRepository> {
        self.reservation_repository.clone()
    }

    pub fn payment_repository(&self) -> Arc<dyn PaymentRepository> {
        self.payment_repository.clone()
    }

    pub fn availability_repository(&self) -> Arc<dyn AvailabilityRepository> {
        self.availability_repository.clone()
    }

    pub fn booking_request_repository(&self) -> Arc<dyn BookingRequestRepository> {
        self.booking_request_repository.clone()
    }
}
