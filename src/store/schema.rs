//! Schema bootstrap for the election database.
//!
//! Tables are created lazily on first open so a fresh database file is
//! usable immediately. `votes.voter_id` carries no uniqueness constraint,
//! so a voter may cast more than one vote; the rows cascade away when the
//! referenced voter or candidate is deleted.

/// Statements run in order against a freshly opened store.
pub const BOOTSTRAP: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS parties (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name VARCHAR(50) NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS candidates (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        first_name VARCHAR(30) NOT NULL,
        last_name VARCHAR(30) NOT NULL,
        industry_connected BOOLEAN NOT NULL,
        party_id INTEGER,
        CONSTRAINT fk_party FOREIGN KEY (party_id)
            REFERENCES parties (id) ON DELETE SET NULL
    )",
    "CREATE TABLE IF NOT EXISTS voters (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        first_name VARCHAR(30) NOT NULL,
        last_name VARCHAR(30) NOT NULL,
        email VARCHAR(50) NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS votes (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        voter_id INTEGER NOT NULL,
        candidate_id INTEGER NOT NULL,
        CONSTRAINT fk_voter FOREIGN KEY (voter_id)
            REFERENCES voters (id) ON DELETE CASCADE,
        CONSTRAINT fk_candidate FOREIGN KEY (candidate_id)
            REFERENCES candidates (id) ON DELETE CASCADE
    )",
];
