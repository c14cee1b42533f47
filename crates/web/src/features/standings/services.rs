use sqlx::PgPool;
use storage::{
    dto::standings::StandingRow, error::Result, repository::entry::EntryRepository,
    services::standings,
};

/// Standings by raw team label, recomputed from the full entry set.
pub async fn team_standings(pool: &PgPool) -> Result<Vec<StandingRow>> {
    let entries = EntryRepository::new(pool).list_ascending().await?;
    Ok(standings::by_team(&entries))
}

/// Standings rolled up by class, recomputed from the full entry set.
pub async fn class_standings(pool: &PgPool) -> Result<Vec<StandingRow>> {
    let entries = EntryRepository::new(pool).list_ascending().await?;
    Ok(standings::by_class(&entries))
}
