use bb8::Pool as Bb8Pool;
use bb8_redis::RedisConnectionManager;
use sqlx::{postgres::PgPoolOptions, Pool, Postgres};
use std::{env::var, time::Duration};

#[derive(Clone)]
pub struct AppStateV2 {
    pool: Pool<Postgres>,
    redis_pool: Bb8Pool<RedisConnectionManager>,
}

impl AppStateV2 {
    pub async fn new() -> Self {
        let db_uri = var("DATABASE_URL").expect("找不到 DATABASE_URL");
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&db_uri)
            .await
            .expect("can't connect to database");

        let redis_uri = var("REDIS_URL").unwrap_or_else(|_| "redis://127.0.0.1:6379".to_string());
        let manager =
            RedisConnectionManager::new(redis_uri).expect("invalid REDIS_URL connection string");
        let redis_pool = Bb8Pool::builder()
            .build(manager)
            .await
            .expect("can't build redis pool");

        Self { pool, redis_pool }
    }

    pub fn get_pool(&self) -> &Pool<Postgres> {
        &self.pool
    }

    pub fn get_redis_pool(&self) -> &Bb8Pool<RedisConnectionManager> {
        &self.redis_pool
    }
}
