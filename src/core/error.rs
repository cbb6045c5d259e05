use thiserror::Error;

#[derive(Error, Debug)]
pub enum HollowError {
    #[error("invalid skill `{name}`: {reason}")]
    InvalidSkill { name: String, reason: String },

    #[error("invalid enemy config `{name}`: {reason}")]
    InvalidConfig { name: String, reason: String },
}

pub type Result<T> = std::result::Result<T, HollowError>;
