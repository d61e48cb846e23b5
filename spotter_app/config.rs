use dotenvy::dotenv;
use std::env;

use spotter_domain::models::user::User;

#[derive(Debug, Clone)]
pub struct Config {
    /// Max exercises a free-tier account may own.
    pub free_exercise_limit: usize,
    /// Max workouts a free-tier account may own.
    pub free_workout_limit: usize,
    pub image_dir: String,
    pub image_base_url: String,
    pub push_gateway_url: Option<String>,
    pub http_port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            free_exercise_limit: 10,
            free_workout_limit: 10,
            image_dir: "uploads".to_string(),
            image_base_url: "/uploads".to_string(),
            push_gateway_url: None,
            http_port: 8080,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();
        let defaults = Self::default();

        let free_exercise_limit = match env::var("SPOTTER_FREE_EXERCISE_LIMIT") {
            Ok(val) => val.parse::<usize>().unwrap_or(defaults.free_exercise_limit),
            Err(_) => defaults.free_exercise_limit,
        };

        let free_workout_limit = match env::var("SPOTTER_FREE_WORKOUT_LIMIT") {
            Ok(val) => val.parse::<usize>().unwrap_or(defaults.free_workout_limit),
            Err(_) => defaults.free_workout_limit,
        };

        let image_dir = env::var("SPOTTER_IMAGE_DIR").unwrap_or(defaults.image_dir);
        let image_base_url = env::var("SPOTTER_IMAGE_BASE_URL").unwrap_or(defaults.image_base_url);

        let push_gateway_url = env::var("SPOTTER_PUSH_GATEWAY_URL")
            .ok()
            .filter(|url| !url.trim().is_empty());

        let http_port = match env::var("SPOTTER_HTTP_PORT") {
            Ok(val) => val.parse::<u16>().unwrap_or(defaults.http_port),
            Err(_) => defaults.http_port,
        };

        Self {
            free_exercise_limit,
            free_workout_limit,
            image_dir,
            image_base_url,
            push_gateway_url,
            http_port,
        }
    }

    /// `None` means the account has no cap.
    pub fn exercise_limit_for(&self, user: &User) -> Option<usize> {
        user.is_free_tier().then_some(self.free_exercise_limit)
    }

    pub fn workout_limit_for(&self, user: &User) -> Option<usize> {
        user.is_free_tier().then_some(self.free_workout_limit)
    }
}
