use super::*;

fn values(pairs: &[(&str, &str)]) -> FormValues {
    pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect()
}

fn business_ok() -> FormValues {
    values(&[(FIELD_STORE_NAME, "Loja da Ana"), (FIELD_CNPJ, "11.222.333/0001-81")])
}

fn full_address(mut v: FormValues) -> FormValues {
    for (k, val) in [
        (FIELD_CEP, "01310-930"),
        (FIELD_STREET, "Avenida Paulista"),
        (FIELD_NUMBER, "1000"),
        (FIELD_DISTRICT, "Bela Vista"),
        (FIELD_CITY, "São Paulo"),
        (FIELD_STATE, "SP"),
    ] {
        v.insert(k.to_owned(), val.to_owned());
    }
    v
}

// =============================================================
// Step validation
// =============================================================

#[test]
fn missing_required_field_names_first_offender() {
    let steps = store_registration_steps();
    let err = validate_step(&steps[0], &values(&[(FIELD_CNPJ, "11.222.333/0001-81")])).unwrap_err();
    assert_eq!(err, StepError::Missing { field: FIELD_STORE_NAME, label: "Nome da Loja" });
    assert_eq!(err.field(), FIELD_STORE_NAME);
    assert_eq!(err.to_string(), "Por favor, preencha o campo: Nome da Loja");
}

#[test]
fn whitespace_only_counts_as_missing() {
    let steps = store_registration_steps();
    let err = validate_step(&steps[0], &values(&[(FIELD_STORE_NAME, "   "), (FIELD_CNPJ, "x")])).unwrap_err();
    assert_eq!(err.field(), FIELD_STORE_NAME);
}

#[test]
fn business_step_rejects_bad_cnpj() {
    let steps = store_registration_steps();
    let v = values(&[(FIELD_STORE_NAME, "Loja"), (FIELD_CNPJ, "11.222.333/0001-80")]);
    let err = validate_step(&steps[0], &v).unwrap_err();
    assert_eq!(err, StepError::InvalidCnpj { field: FIELD_CNPJ });
    assert_eq!(err.to_string(), "CNPJ inválido! Por favor, verifique o número.");
}

#[test]
fn description_is_optional() {
    let steps = store_registration_steps();
    assert_eq!(validate_step(&steps[0], &business_ok()), Ok(()));
}

#[test]
fn logo_step_has_no_required_fields() {
    let steps = store_registration_steps();
    assert_eq!(validate_step(&steps[2], &FormValues::new()), Ok(()));
}

// =============================================================
// Navigation
// =============================================================

#[test]
fn advance_is_blocked_until_step_validates() {
    let mut wizard = FormWizardState::new(store_registration_steps());
    assert!(wizard.advance(&FormValues::new()).is_err());
    assert_eq!(wizard.current_step, 0);

    assert_eq!(wizard.advance(&business_ok()), Ok(()));
    assert_eq!(wizard.current_step, 1);
}

#[test]
fn address_step_requires_every_address_field() {
    let mut wizard = FormWizardState::new(store_registration_steps());
    wizard.advance(&business_ok()).unwrap();
    let mut v = full_address(business_ok());
    v.remove(FIELD_NUMBER);
    let err = wizard.advance(&v).unwrap_err();
    assert_eq!(err.field(), FIELD_NUMBER);
    assert_eq!(wizard.current_step, 1);
}

#[test]
fn advance_stops_at_last_step() {
    let mut wizard = FormWizardState::new(store_registration_steps());
    let v = full_address(business_ok());
    wizard.advance(&v).unwrap();
    wizard.advance(&v).unwrap();
    assert!(wizard.is_last_step());
    assert_eq!(wizard.advance(&v), Ok(()));
    assert_eq!(wizard.current_step, 2);
}

#[test]
fn retreat_is_unconditional_and_floors_at_zero() {
    let mut wizard = FormWizardState::new(store_registration_steps());
    wizard.retreat();
    assert_eq!(wizard.current_step, 0);
    wizard.advance(&business_ok()).unwrap();
    wizard.retreat();
    assert_eq!(wizard.current_step, 0);
}

#[test]
fn indicators_track_position() {
    let mut wizard = FormWizardState::new(store_registration_steps());
    wizard.advance(&business_ok()).unwrap();
    assert_eq!(wizard.indicator(0), StepIndicator::Completed);
    assert_eq!(wizard.indicator(1), StepIndicator::Active);
    assert_eq!(wizard.indicator(2), StepIndicator::Pending);
    assert_eq!(StepIndicator::Completed.css_class(), "step completed");
}

// =============================================================
// Submission payload
// =============================================================

#[test]
fn registration_form_strips_cnpj_mask() {
    let form = registration_form(&full_address(business_ok()));
    assert_eq!(form.nome, "Loja da Ana");
    assert_eq!(form.cnpj, "11222333000181");
    assert_eq!(form.cidade, "São Paulo");
    assert_eq!(form.descricao, "");
}
