use clap::Parser;

use crate::names;

#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub struct Config {
    /// Full PostgreSQL connection string. Overrides the individual
    /// `database_*` settings when present.
    #[arg(long, env)]
    pub database_url: Option<String>,

    /// PostgreSQL user.
    #[arg(long, env, default_value = "student")]
    pub database_user: String,

    /// PostgreSQL password.
    #[arg(long, env, default_value = "")]
    pub database_password: String,

    /// PostgreSQL host.
    #[arg(long, env, default_value = "localhost")]
    pub database_host: String,

    /// PostgreSQL port.
    #[arg(long, env, default_value_t = 5432)]
    pub database_port: u16,

    /// PostgreSQL database name.
    #[arg(long, env, default_value = "trivia")]
    pub database_name: String,

    /// The address to bind to.
    #[arg(short, long, env, default_value = "127.0.0.1:5000")]
    pub address: String,

    /// Number of questions per page.
    #[arg(
        long,
        env = "QUESTIONS_PER_PAGE",
        default_value_t = names::DEFAULT_PAGE_SIZE,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub page_size: usize,
}

impl Config {
    pub fn database_url(&self) -> String {
        match &self.database_url {
            Some(url) => url.clone(),
            None => format!(
                "postgresql://{}:{}@{}:{}/{}",
                self.database_user,
                self.database_password,
                self.database_host,
                self.database_port,
                self.database_name
            ),
        }
    }
}
