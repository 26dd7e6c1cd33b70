use sea_orm::DbErr;

#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("Database error: {0}")]
    Db(#[from] DbErr),
    #[error("todo not updated: no stored record with id={id}")]
    RecordNotUpdated { id: i64 },
}

pub type RepoResult<T> = Result<T, RepoError>;
