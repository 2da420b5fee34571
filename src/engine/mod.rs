pub mod cpf;
pub mod forms;
mod generate;
mod mask;
pub mod rules;

pub use cpf::{
    compute_check_digits, diagnose_cpf, has_valid_length, normalize_digits, validate_cpf,
    validate_cpf_with,
};
pub use forms::{
    validate_json, Form, FormKind, FormRules, Income, LoginForm, ProfessionalForm,
    SoloMotherForm,
};
pub use generate::{generate_cpf, generate_cpfs};
pub use mask::{mask_cpf, mask_phone};
pub use rules::{FieldError, ValidationReport};
