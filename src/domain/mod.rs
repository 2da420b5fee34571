mod cpf;
mod user;

pub use cpf::{Cpf, CpfError, Strictness, CPF_LEN};
pub use user::UserKind;
