//! Linear multi-step form with per-step validation gating.
//!
//! DESIGN
//! ======
//! Steps are described as data ([`StepSpec`]) and field values live in a
//! plain map, so validation runs without touching the DOM. The component
//! focuses the field named by a [`StepError`] and shows its message.

#[cfg(test)]
#[path = "wizard_test.rs"]
mod wizard_test;

use std::collections::HashMap;

use crate::net::types::StoreRegistrationForm;
use crate::util::cnpj::is_valid_cnpj;
use crate::util::mask::{MaskKind, digits_only};

/// One input in a step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    /// DOM id, also the key in [`FormValues`].
    pub id: &'static str,
    pub label: &'static str,
    pub required: bool,
    pub mask: Option<MaskKind>,
}

impl FieldSpec {
    const fn required(id: &'static str, label: &'static str) -> Self {
        Self { id, label, required: true, mask: None }
    }

    const fn optional(id: &'static str, label: &'static str) -> Self {
        Self { id, label, required: false, mask: None }
    }

    const fn masked(self, mask: MaskKind) -> Self {
        Self { mask: Some(mask), ..self }
    }
}

/// One page of the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepSpec {
    pub title: &'static str,
    pub fields: Vec<FieldSpec>,
    /// Field that must hold a valid CNPJ for the step to pass.
    pub cnpj_field: Option<&'static str>,
}

/// Why a step refused to advance.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StepError {
    #[error("Por favor, preencha o campo: {label}")]
    Missing { field: &'static str, label: &'static str },
    #[error("CNPJ inválido! Por favor, verifique o número.")]
    InvalidCnpj { field: &'static str },
}

impl StepError {
    /// Id of the field that should receive focus.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Missing { field, .. } | Self::InvalidCnpj { field } => field,
        }
    }
}

/// Current value of every field, keyed by field id.
pub type FormValues = HashMap<String, String>;

/// Visual state of a step indicator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepIndicator {
    Pending,
    Active,
    Completed,
}

impl StepIndicator {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Pending => "step",
            Self::Active => "step active",
            Self::Completed => "step completed",
        }
    }
}

/// Check one step's required fields and CNPJ rule.
pub fn validate_step(step: &StepSpec, values: &FormValues) -> Result<(), StepError> {
    let value_of = |id: &str| values.get(id).map_or("", |v| v.trim());

    if let Some(missing) = step.fields.iter().find(|f| f.required && value_of(f.id).is_empty()) {
        return Err(StepError::Missing { field: missing.id, label: missing.label });
    }
    if let Some(field) = step.cnpj_field {
        if !is_valid_cnpj(value_of(field)) {
            return Err(StepError::InvalidCnpj { field });
        }
    }
    Ok(())
}

/// Wizard position over a fixed list of steps.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormWizardState {
    pub current_step: usize,
    pub steps: Vec<StepSpec>,
}

impl FormWizardState {
    pub fn new(steps: Vec<StepSpec>) -> Self {
        Self { current_step: 0, steps }
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn current(&self) -> Option<&StepSpec> {
        self.steps.get(self.current_step)
    }

    pub fn is_last_step(&self) -> bool {
        self.current_step + 1 >= self.steps.len()
    }

    /// Validate the current step without moving.
    pub fn validate_current(&self, values: &FormValues) -> Result<(), StepError> {
        self.current().map_or(Ok(()), |step| validate_step(step, values))
    }

    /// Move forward when the current step validates. Staying on the last
    /// step after it validates is not an error.
    pub fn advance(&mut self, values: &FormValues) -> Result<(), StepError> {
        self.validate_current(values)?;
        if !self.is_last_step() {
            self.current_step += 1;
        }
        Ok(())
    }

    /// Move back one step; never below the first.
    pub fn retreat(&mut self) {
        self.current_step = self.current_step.saturating_sub(1);
    }

    pub fn indicator(&self, step: usize) -> StepIndicator {
        match step.cmp(&self.current_step) {
            std::cmp::Ordering::Less => StepIndicator::Completed,
            std::cmp::Ordering::Equal => StepIndicator::Active,
            std::cmp::Ordering::Greater => StepIndicator::Pending,
        }
    }
}

pub const FIELD_STORE_NAME: &str = "nome-loja";
pub const FIELD_CNPJ: &str = "cnpj";
pub const FIELD_DESCRIPTION: &str = "descricao";
pub const FIELD_CEP: &str = "cep";
pub const FIELD_STREET: &str = "rua";
pub const FIELD_NUMBER: &str = "numero";
pub const FIELD_DISTRICT: &str = "bairro";
pub const FIELD_CITY: &str = "cidade";
pub const FIELD_STATE: &str = "estado";

/// Business data, address, then logo.
pub fn store_registration_steps() -> Vec<StepSpec> {
    vec![
        StepSpec {
            title: "Dados da Loja",
            fields: vec![
                FieldSpec::required(FIELD_STORE_NAME, "Nome da Loja"),
                FieldSpec::required(FIELD_CNPJ, "CNPJ").masked(MaskKind::Cnpj),
                FieldSpec::optional(FIELD_DESCRIPTION, "Descrição"),
            ],
            cnpj_field: Some(FIELD_CNPJ),
        },
        StepSpec {
            title: "Endereço",
            fields: vec![
                FieldSpec::required(FIELD_CEP, "CEP").masked(MaskKind::Cep),
                FieldSpec::required(FIELD_STREET, "Rua"),
                FieldSpec::required(FIELD_NUMBER, "Número"),
                FieldSpec::required(FIELD_DISTRICT, "Bairro"),
                FieldSpec::required(FIELD_CITY, "Cidade"),
                FieldSpec::required(FIELD_STATE, "Estado"),
            ],
            cnpj_field: None,
        },
        StepSpec { title: "Logo", fields: Vec::new(), cnpj_field: None },
    ]
}

/// Text parts of the registration request. The CNPJ is sent as digits only.
pub fn registration_form(values: &FormValues) -> StoreRegistrationForm {
    let get = |id: &str| values.get(id).map_or_else(String::new, |v| v.trim().to_owned());
    StoreRegistrationForm {
        nome: get(FIELD_STORE_NAME),
        cnpj: digits_only(&get(FIELD_CNPJ)),
        descricao: get(FIELD_DESCRIPTION),
        rua: get(FIELD_STREET),
        numero: get(FIELD_NUMBER),
        bairro: get(FIELD_DISTRICT),
        cidade: get(FIELD_CITY),
        estado: get(FIELD_STATE),
    }
}
