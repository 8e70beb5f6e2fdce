use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

const INDEXES: [&str; 3] = [
    "CREATE INDEX IF NOT EXISTS idx_time_slots_date_start ON time_slots(date, start_time)",
    "CREATE INDEX IF NOT EXISTS idx_time_slots_is_booked ON time_slots(is_booked)",
    "CREATE INDEX IF NOT EXISTS idx_time_slots_slot_type ON time_slots(slot_type)",
];

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create time_slots table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS time_slots (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            slot_type VARCHAR(16) NOT NULL,
            day_of_week SMALLINT NULL,
            date DATE NULL,
            start_time TIME NULL,
            end_time TIME NULL,
            is_booked BOOLEAN NOT NULL DEFAULT FALSE,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_slot_type CHECK (slot_type IN ('WEEKLY', 'FLEXIBLE', 'DAY_ONLY')),
            CONSTRAINT valid_day_of_week CHECK (day_of_week BETWEEN 0 AND 6),
            CONSTRAINT valid_time_range CHECK (end_time > start_time),
            CONSTRAINT valid_slot_shape CHECK (
                (slot_type = 'WEEKLY' AND day_of_week IS NOT NULL AND date IS NULL
                    AND start_time IS NOT NULL AND end_time IS NOT NULL)
                OR (slot_type = 'FLEXIBLE' AND day_of_week IS NULL AND date IS NOT NULL
                    AND start_time IS NOT NULL AND end_time IS NOT NULL)
                OR (slot_type = 'DAY_ONLY' AND day_of_week IS NULL AND date IS NOT NULL
                    AND start_time IS NULL AND end_time IS NULL)
            )
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    for statement in INDEXES {
        sqlx::query(statement).execute(pool).await?;
    }

    info!("Database schema initialized successfully.");
    Ok(())
}
