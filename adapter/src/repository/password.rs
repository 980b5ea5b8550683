use shared::error::AppResult;

// bcrypt は CPU を占有するので、非同期ランタイムのワーカーではなく blocking スレッドで実行する

pub(crate) async fn hash_password(password: String) -> AppResult<String> {
    let hashed =
        tokio::task::spawn_blocking(move || bcrypt::hash(password, bcrypt::DEFAULT_COST)).await??;
    Ok(hashed)
}

pub(crate) async fn verify_password(password: String, password_hash: String) -> AppResult<bool> {
    let valid =
        tokio::task::spawn_blocking(move || bcrypt::verify(password, &password_hash)).await??;
    Ok(valid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::AppError;

    #[tokio::test]
    async fn hashed_password_verifies() {
        let hashed = hash_password("Pa55w0rd".into()).await.unwrap();
        assert_ne!(hashed, "Pa55w0rd");
        assert!(verify_password("Pa55w0rd".into(), hashed.clone()).await.unwrap());
        assert!(!verify_password("wrong".into(), hashed).await.unwrap());
    }

    #[tokio::test]
    async fn malformed_hash_is_an_error() {
        let res = verify_password("Pa55w0rd".into(), "not-a-bcrypt-hash".into()).await;
        assert!(matches!(res, Err(AppError::BcryptError(_))));
    }
}
