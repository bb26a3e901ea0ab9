use crate::state::AppStateV2;
use redis::{AsyncCommands, RedisError};

// 設置有效時間 1 小時的鍵值對
pub async fn redis_set(state: &AppStateV2, key: &str, value: &str) -> Result<(), RedisError> {
    let mut conn = state
        .get_redis_pool()
        .get()
        .await
        .expect("redis_pool get fail");

    conn.set_ex(key, value, 3600).await
}

// 檢查 Redis 中的鍵是否存在
pub async fn redis_check_key_exists(state: &AppStateV2, key: &str) -> Result<bool, RedisError> {
    let mut conn = state
        .get_redis_pool()
        .get()
        .await
        .expect("redis_pool get fail");

    let exists: bool = conn.exists(key).await?;
    Ok(exists)
}
