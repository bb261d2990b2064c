//! Demo data for a fresh installation.
//!
//! Seeding only happens when the `clients` table is empty, so calling it
//! repeatedly never duplicates rows.

use sqlx::PgPool;

/// Demo clients: `(name, email, phone, address)`.
pub const DEMO_CLIENTS: &[(&str, &str, &str, &str)] = &[
    (
        "Tech Solutions SARL",
        "contact@techsolutions.fr",
        "+33 1 45 67 89 10",
        "123 Avenue Tech, Paris",
    ),
    (
        "BioNature France",
        "info@bionature.fr",
        "+33 4 78 45 12 36",
        "456 Rue Verte, Lyon",
    ),
    (
        "InnovStart",
        "hello@innovstart.com",
        "+33 5 61 23 45 67",
        "789 Boulevard Innovation, Toulouse",
    ),
    (
        "Global Services",
        "contact@globalservices.fr",
        "+33 2 34 56 78 90",
        "321 Rue Commerce, Lille",
    ),
];

/// Demo products: `(name, description, price, stock)`.
pub const DEMO_PRODUCTS: &[(&str, &str, f64, i32)] = &[
    ("Pro Laptop", "15\" laptop, 16GB RAM, 512GB SSD", 1299.99, 10),
    ("Ergonomic Mouse", "Wireless ergonomic mouse for heavy use", 45.50, 25),
    ("Mechanical Keyboard", "Backlit RGB mechanical keyboard", 89.99, 15),
    ("24-inch Monitor", "24\" Full HD LCD monitor, 75Hz", 189.99, 8),
    ("Pro Headset", "Professional headset with noise cancelling", 149.99, 12),
];

/// What a seeding attempt did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// Demo rows were inserted.
    Seeded { clients: usize, products: usize },
    /// Clients already existed; nothing was written.
    AlreadyPresent,
}

/// Insert the demo clients and products in one transaction.
pub async fn seed_demo_data(pool: &PgPool) -> Result<SeedOutcome, sqlx::Error> {
    let mut tx = pool.begin().await?;

    // Serialize concurrent seeders so the emptiness check stays valid.
    sqlx::query("LOCK TABLE clients IN SHARE ROW EXCLUSIVE MODE")
        .execute(&mut *tx)
        .await?;

    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM clients")
        .fetch_one(&mut *tx)
        .await?;
    if existing > 0 {
        return Ok(SeedOutcome::AlreadyPresent);
    }

    for (name, email, phone, address) in DEMO_CLIENTS {
        sqlx::query("INSERT INTO clients (name, email, phone, address) VALUES ($1, $2, $3, $4)")
            .bind(name)
            .bind(email)
            .bind(phone)
            .bind(address)
            .execute(&mut *tx)
            .await?;
    }

    for (name, description, price, stock) in DEMO_PRODUCTS {
        sqlx::query(
            "INSERT INTO products (name, description, price, stock) VALUES ($1, $2, $3, $4)",
        )
        .bind(name)
        .bind(description)
        .bind(price)
        .bind(stock)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    tracing::info!(
        clients = DEMO_CLIENTS.len(),
        products = DEMO_PRODUCTS.len(),
        "Demo data seeded",
    );

    Ok(SeedOutcome::Seeded {
        clients: DEMO_CLIENTS.len(),
        products: DEMO_PRODUCTS.len(),
    })
}
