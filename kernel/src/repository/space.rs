use crate::model::{
    id::SpaceId,
    space::{
        event::{CreateSpace, DeleteSpace, UpdateSpace},
        Space,
    },
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait SpaceRepository: Send + Sync {
    async fn create(&self, event: CreateSpace) -> AppResult<SpaceId>;
    async fn find_all(&self) -> AppResult<Vec<Space>>;
    async fn find_by_id(&self, space_id: SpaceId) -> AppResult<Option<Space>>;
    async fn update(&self, event: UpdateSpace) -> AppResult<()>;
    async fn delete(&self, event: DeleteSpace) -> AppResult<()>;
}
