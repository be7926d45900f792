use anyhow::Context;
use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use dotenvy::dotenv;

use vendora_cli::{admin, seeder};
use vendora_config::DatabaseConfig;
use vendora_db::init_db_pool;

#[derive(Parser)]
#[command(name = "vendora-cli")]
#[command(about = "Vendora CLI - Administrative tools for the Vendor A API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new administrator account
    CreateAdmin {
        /// Username of the administrator
        #[arg(short = 'u', long)]
        username: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Seed the catalogue with fake products
    SeedProducts {
        /// Number of products to create
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,
    },
    /// Delete every product
    ClearProducts,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let cli = Cli::parse();

    let config = DatabaseConfig::from_env()?;
    let pool = init_db_pool(&config)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::CreateAdmin { username, password } => {
            let username = match username {
                Some(username) => username,
                None => Input::new()
                    .with_prompt("Username")
                    .interact_text()
                    .context("Failed to read username")?,
            };

            let password = match password {
                Some(password) => password,
                None => Password::new()
                    .with_prompt("Password")
                    .with_confirmation("Confirm password", "Passwords don't match")
                    .interact()
                    .context("Failed to read password")?,
            };

            let user = admin::create_admin(&pool, &username, &password).await?;
            println!("\n✅ Admin created successfully!");
            println!("   Id: {}", user.id);
            println!("   Username: {}", user.username);
        }
        Commands::SeedProducts { count } => {
            seeder::seed_products(&pool, count).await?;
        }
        Commands::ClearProducts => {
            seeder::clear_products(&pool).await?;
        }
    }

    Ok(())
}
