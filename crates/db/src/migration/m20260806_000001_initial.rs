//! Initial database migration.
//!
//! Creates the enums, users table, and ledger_entries table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared(ENUMS_SQL).await?;
        db.execute_unprepared(USERS_SQL).await?;
        db.execute_unprepared(LEDGER_ENTRIES_SQL).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(DROP_ALL_SQL).await?;
        Ok(())
    }
}

const ENUMS_SQL: &str = r"
-- Entry classification
CREATE TYPE entry_type AS ENUM (
    'income',
    'expense'
);

-- Entry lifecycle state
CREATE TYPE entry_status AS ENUM (
    'pending',
    'settled',
    'cancelled'
);
";

const USERS_SQL: &str = r"
CREATE TABLE users (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    name VARCHAR(255) NOT NULL,
    email VARCHAR(255) NOT NULL UNIQUE,
    password_hash VARCHAR(255) NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE INDEX idx_users_email ON users(email);
";

const LEDGER_ENTRIES_SQL: &str = r"
CREATE TABLE ledger_entries (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    description VARCHAR(255) NOT NULL,
    month INTEGER NOT NULL CHECK (month BETWEEN 1 AND 12),
    year INTEGER NOT NULL,
    amount NUMERIC(16, 2) NOT NULL CHECK (amount > 0),
    entry_type entry_type NOT NULL,
    status entry_status NOT NULL DEFAULT 'pending',
    user_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    registered_on DATE NOT NULL DEFAULT CURRENT_DATE
);

-- Search by user, optionally narrowed to a period
CREATE INDEX idx_entries_user_period ON ledger_entries(user_id, year, month);

-- Balance aggregate: sum by user, type, and status
CREATE INDEX idx_entries_balance ON ledger_entries(user_id, entry_type, status);
";

const DROP_ALL_SQL: &str = r"
DROP TABLE IF EXISTS ledger_entries CASCADE;
DROP TABLE IF EXISTS users CASCADE;
DROP TYPE IF EXISTS entry_status;
DROP TYPE IF EXISTS entry_type;
";
