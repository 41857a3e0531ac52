use std::env;

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub port: i32,
    pub db_url: String,
    pub mail: MailConfig,
}

#[derive(Clone, Debug)]
pub struct MailConfig {
    pub api_key: String,
    pub from: String,
    pub reset_url: String,
}

impl EnvConfig {
    fn get_env(key: &str) -> String {
        env::var(key).unwrap_or_else(|_| panic!("Environment variable {} not set", key))
    }

    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        EnvConfig {
            port: Self::get_env("PORT").parse().unwrap_or(8080),
            db_url: Self::get_env("POSTGRES_URI"),
            mail: MailConfig {
                api_key: Self::get_env("RESEND_KEY"),
                from: Self::get_env("MAIL_FROM"),
                reset_url: env::var("RESET_URL")
                    .unwrap_or_else(|_| "https://stay.example/change_password".to_string()),
            },
        }
    }
}
