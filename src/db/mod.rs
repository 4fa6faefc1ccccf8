pub mod achievements;
pub mod attachments;
pub mod blog_posts;
pub mod credentials;
pub mod education;
pub mod entries;
pub mod hobbies;
pub mod images;
pub mod links;
pub mod open_source;
pub mod owners;
pub mod portfolio;
pub mod side_projects;
pub mod skills;
pub mod volunteer_work;
pub mod websites;
pub mod work_experience;

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::time::Duration;

use crate::config::AppConfig;

/// Create a SeaORM connection pool from the loaded configuration.
pub async fn create_pool(config: &AppConfig) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(config.db_max_connections)
        .connect_timeout(Duration::from_secs(30))
        .acquire_timeout(Duration::from_secs(30))
        .sqlx_logging(false);

    Database::connect(opt).await
}
