use dotenv::dotenv;
use std::env;

use crate::errors::AppError;

pub fn get_env_value_by_key(key: &str) -> Result<String, AppError> {
    dotenv().ok();

    env::var(key).map_err(|_| AppError::NotFound(format!("{} in env", key)))
}
