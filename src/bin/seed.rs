//! Idempotent database seed: admin user, default settings, the home page
//! section list, and a few sample content rows. Safe to re-run.
//!
//! Usage: `cargo run --bin seed`

use argon2::{
    password_hash::{PasswordHasher as _, SaltString},
    Argon2,
};
use rand_core::OsRng;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbErr, Statement};
use serde_json::json;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), DbErr> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    dotenvy::dotenv().ok();
    let db_url = std::env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");

    let db = Database::connect(&db_url).await?;

    info!("Seeding database...");

    seed_admin_user(&db).await?;
    seed_default_settings(&db).await?;
    seed_home_page(&db).await?;
    seed_samples(&db).await?;

    info!("Seeding completed!");
    Ok(())
}

fn stmt(db: &DatabaseConnection, sql: &str, values: Vec<sea_orm::Value>) -> Statement {
    Statement::from_sql_and_values(db.get_database_backend(), sql, values)
}

async fn seed_admin_user(db: &DatabaseConnection) -> Result<(), DbErr> {
    // Change this!
    let password_hash = Argon2::default()
        .hash_password(b"admin123", &SaltString::generate(&mut OsRng))
        .expect("password hashing failed")
        .to_string();

    db.execute(stmt(
        db,
        r#"
        INSERT INTO users (email, name, password_hash)
        VALUES ($1, $2, $3)
        ON CONFLICT DO NOTHING
        "#,
        vec![
            "admin@example.com".into(),
            "Admin User".into(),
            password_hash.into(),
        ],
    ))
    .await?;

    info!("Created admin user: admin@example.com");
    Ok(())
}

async fn seed_default_settings(db: &DatabaseConnection) -> Result<(), DbErr> {
    let defaults = [
        ("siteName", json!("Portfolio")),
        ("primaryColor", json!("#3b82f6")),
        ("accentColor", json!("#8b5cf6")),
        ("backgroundColor", json!("#ffffff")),
        ("footerText", json!("© 2024 Portfolio. All rights reserved.")),
        ("socialLinks", json!({})),
    ];

    for (key, value) in defaults {
        db.execute(stmt(
            db,
            r#"
            INSERT INTO settings (key, value)
            VALUES ($1, $2)
            ON CONFLICT (key) DO NOTHING
            "#,
            vec![key.into(), value.to_string().into()],
        ))
        .await?;
    }

    info!("Created default settings");
    Ok(())
}

async fn seed_home_page(db: &DatabaseConnection) -> Result<(), DbErr> {
    let content = json!({
        "sections": [
            {
                "id": "hero",
                "type": "hero",
                "enabled": true,
                "order": 0,
                "data": {
                    "title": "Welcome to My Portfolio",
                    "subtitles": [
                        "Geomatics Engineer",
                        "Software Engineer",
                        "GIS Analyst",
                        "Remote Sensing Researcher"
                    ],
                    "ctaText": "View My Work",
                    "ctaLink": "/projects"
                }
            },
            {"id": "featured-projects", "type": "featured-projects", "enabled": true, "order": 1, "data": {}},
            {"id": "about-preview", "type": "about-preview", "enabled": true, "order": 2, "data": {}},
            {"id": "skills", "type": "skills", "enabled": true, "order": 3, "data": {}},
            {"id": "experience-preview", "type": "experience-preview", "enabled": true, "order": 4, "data": {}},
            {"id": "blogs", "type": "blogs", "enabled": true, "order": 5, "data": {}}
        ]
    });

    db.execute(stmt(
        db,
        r#"
        INSERT INTO pages (slug, title, content, enabled, sort_order)
        VALUES ($1, $2, $3, $4, $5)
        ON CONFLICT DO NOTHING
        "#,
        vec![
            "home".into(),
            "Home".into(),
            content.to_string().into(),
            true.into(),
            0i32.into(),
        ],
    ))
    .await?;

    info!("Created home page");
    Ok(())
}

/// Sample rows are seeded only into empty tables; they have no natural
/// unique key to upsert on.
async fn seed_samples(db: &DatabaseConnection) -> Result<(), DbErr> {
    if table_is_empty(db, "experiences").await? {
        db.execute(stmt(
            db,
            r#"
            INSERT INTO experiences
                (role, organization, location, start_date, description, kind, sort_order, visible)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
            vec![
                "Software Engineer".into(),
                "Example Company".into(),
                "Remote".into(),
                chrono::NaiveDate::from_ymd_opt(2023, 1, 1).unwrap().into(),
                json!([
                    "Developed full-stack web applications",
                    "Collaborated with cross-functional teams",
                    "Implemented best practices and code reviews"
                ])
                .to_string()
                .into(),
                "Work".into(),
                0i32.into(),
                true.into(),
            ],
        ))
        .await?;
        info!("Created sample experience");
    }

    db.execute(stmt(
        db,
        r#"
        INSERT INTO projects
            (title, slug, overview, problem, solution, result, tech_stack, image_gallery, featured, sort_order)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        ON CONFLICT DO NOTHING
        "#,
        vec![
            "Sample Project".into(),
            "sample-project".into(),
            "This is a sample project to demonstrate the portfolio system.".into(),
            "A problem that needed solving.".into(),
            "An elegant solution was implemented.".into(),
            "Great results were achieved.".into(),
            json!(["React", "Next.js", "TypeScript"]).to_string().into(),
            json!([]).to_string().into(),
            true.into(),
            0i32.into(),
        ],
    ))
    .await?;
    info!("Created sample project");

    if table_is_empty(db, "skills").await? {
        let skills = [
            ("React", "Frontend", 0),
            ("Next.js", "Frontend", 1),
            ("TypeScript", "Frontend", 2),
            ("Node.js", "Backend", 0),
            ("PostgreSQL", "Database", 0),
        ];

        for (name, category, sort_order) in skills {
            db.execute(stmt(
                db,
                r#"
                INSERT INTO skills (name, category, sort_order)
                VALUES ($1, $2, $3)
                "#,
                vec![name.into(), category.into(), (sort_order as i32).into()],
            ))
            .await?;
        }
        info!("Created sample skills");
    }

    Ok(())
}

async fn table_is_empty(db: &DatabaseConnection, table: &str) -> Result<bool, DbErr> {
    let row = db
        .query_one(Statement::from_string(
            db.get_database_backend(),
            format!("SELECT COUNT(*) AS count FROM {}", table),
        ))
        .await?;

    let count: i64 = row
        .map(|r| r.try_get::<i64>("", "count"))
        .transpose()?
        .unwrap_or(0);

    Ok(count == 0)
}
