// src/forms/user_form.rs

use validator::Validate;

use super::{
    field_errors::{required_value, FieldErrors},
    masks,
    modal::FormSchema,
    rules::{self, MSG_CURRENT_PASSWORD, MSG_PASSWORD_MISMATCH, PHONE_PATTERN},
};
use crate::models::{
    auth::Role,
    user::{PasswordChange, User, UserCreate, UserUpdate, Users},
};

#[derive(Debug, Clone, PartialEq, Validate)]
pub struct UserForm {
    #[validate(
        custom(function = "rules::required"),
        length(min = 3, message = "Mínimo de caracteres não atendido")
    )]
    pub name: String,

    #[validate(custom(function = "rules::required"))]
    pub cnpj_cpf: String,

    #[validate(
        custom(function = "rules::required"),
        regex(path = *PHONE_PATTERN, message = "Formato inválido")
    )]
    pub phone_number: String,

    #[validate(custom(function = "rules::required"), email(message = "E-mail inválido"))]
    pub email: String,

    #[validate(custom(function = "rules::required"))]
    pub address: String,

    #[validate(custom(function = "rules::required"))]
    pub city: String,

    #[validate(custom(function = "rules::uf"))]
    pub uf: String,

    #[validate(required(message = "Campo obrigatório"))]
    pub role: Option<Role>,

    // Troca de senha: opcional, só vale em edição
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,

    pub active: bool,

    /// Editando o próprio perfil: exige a senha atual para trocar a senha.
    pub profile: bool,
}

impl Default for UserForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            cnpj_cpf: String::new(),
            phone_number: String::new(),
            email: String::new(),
            address: String::new(),
            city: String::new(),
            uf: String::new(),
            role: Some(Role::Administrator),
            current_password: String::new(),
            new_password: String::new(),
            confirm_password: String::new(),
            active: true,
            profile: false,
        }
    }
}

impl UserForm {
    pub fn profile(user: &User) -> Self {
        Self {
            profile: true,
            ..Self::from_record(user)
        }
    }

    pub fn set_phone(&mut self, raw: &str) {
        self.phone_number = masks::phone(raw);
    }

    pub fn set_cnpj_cpf(&mut self, raw: &str) {
        self.cnpj_cpf = masks::cnpj_cpf(raw);
    }

    fn wants_password_change(&self) -> bool {
        !self.new_password.is_empty() || !self.confirm_password.is_empty()
    }

    fn check_passwords(&self, errors: &mut FieldErrors) {
        if !self.wants_password_change() {
            return;
        }
        if self.new_password != self.confirm_password {
            errors.add("confirmPassword", MSG_PASSWORD_MISMATCH);
        }
        if self.profile && self.current_password.is_empty() {
            errors.add("currentPassword", MSG_CURRENT_PASSWORD);
        }
    }

    /// Pedido de troca de senha que acompanha uma edição válida.
    pub fn password_change(&self, user_id: i64) -> Option<PasswordChange> {
        if self.new_password.is_empty() {
            return None;
        }
        Some(PasswordChange {
            user_id,
            current_password: self.profile.then(|| self.current_password.clone()),
            new_password: self.new_password.clone(),
        })
    }
}

impl FormSchema for UserForm {
    type Resource = Users;

    fn from_record(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            cnpj_cpf: masks::cnpj_cpf(&user.cnpj_cpf),
            phone_number: masks::phone(&user.phone_number),
            email: user.email.clone(),
            address: user.address.clone(),
            city: user.city.clone(),
            uf: user.uf.clone(),
            role: user.role.parse().ok(),
            active: user.active,
            ..Self::default()
        }
    }

    fn check(&self) -> Result<(), FieldErrors> {
        let mut errors = match self.validate() {
            Ok(()) => FieldErrors::new(),
            Err(e) => FieldErrors::from(&e),
        };
        self.check_passwords(&mut errors);
        errors.into_result()
    }

    fn create_payload(&self) -> Result<UserCreate, FieldErrors> {
        Ok(UserCreate {
            role: required_value(self.role, "role")?,
            name: self.name.clone(),
            cnpj_cpf: self.cnpj_cpf.clone(),
            phone_number: self.phone_number.clone(),
            email: self.email.clone(),
            address: self.address.clone(),
            city: self.city.clone(),
            uf: self.uf.clone(),
        })
    }

    fn update_payload(&self) -> Result<UserUpdate, FieldErrors> {
        Ok(UserUpdate {
            password: String::new(),
            role: required_value(self.role, "role")?.to_string(),
            name: self.name.clone(),
            cnpj_cpf: self.cnpj_cpf.clone(),
            phone_number: self.phone_number.clone(),
            email: self.email.clone(),
            address: self.address.clone(),
            city: self.city.clone(),
            uf: self.uf.clone(),
            active: self.active,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::forms::{
        modal::{Modal, Submission},
        rules::{MSG_EMAIL, MSG_FORMAT, MSG_MIN_LENGTH, MSG_REQUIRED},
    };

    fn filled() -> UserForm {
        UserForm {
            name: "Maria Souza".into(),
            cnpj_cpf: "123.456.789-01".into(),
            phone_number: "(11) 98765-4321".into(),
            email: "maria@empresa.com".into(),
            address: "Rua A, 10".into(),
            city: "Campinas".into(),
            uf: "SP".into(),
            ..UserForm::default()
        }
    }

    fn stored_user() -> User {
        User {
            id: Some(7),
            role: "Gerente".into(),
            name: "Maria Souza".into(),
            cnpj_cpf: "12345678901".into(),
            phone_number: "11987654321".into(),
            email: "maria@empresa.com".into(),
            address: "Rua A, 10".into(),
            city: "Campinas".into(),
            uf: "SP".into(),
            active: true,
            registered_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn blank_form_defaults() {
        let form = UserForm::default();
        assert_eq!(form.role, Some(Role::Administrator));
        assert!(form.active);
    }

    #[test]
    fn one_message_per_field_by_priority() {
        let form = UserForm {
            name: "Al".into(),
            email: "sem-arroba".into(),
            phone_number: "(11) 9876".into(),
            uf: String::new(),
            ..filled()
        };
        let errors = form.check().unwrap_err();

        assert_eq!(errors.get("name"), Some(MSG_MIN_LENGTH));
        assert_eq!(errors.get("email"), Some(MSG_EMAIL));
        assert_eq!(errors.get("phoneNumber"), Some(MSG_FORMAT));
        assert_eq!(errors.get("uf"), Some(MSG_REQUIRED));
        assert_eq!(errors.get("city"), None);
    }

    #[test]
    fn empty_required_field_reports_required_not_min_length() {
        let form = UserForm { name: String::new(), ..filled() };
        assert_eq!(form.check().unwrap_err().get("name"), Some(MSG_REQUIRED));
    }

    #[test]
    fn passwords_must_match_when_either_is_filled() {
        let form = UserForm {
            new_password: "segredo1".into(),
            confirm_password: "segredo2".into(),
            ..filled()
        };
        assert_eq!(
            form.check().unwrap_err().get("confirmPassword"),
            Some(MSG_PASSWORD_MISMATCH)
        );

        let form = UserForm { confirm_password: "x".into(), ..filled() };
        assert!(form.check().is_err());

        assert!(filled().check().is_ok());
    }

    #[test]
    fn profile_mode_requires_current_password() {
        let mut form = UserForm::profile(&stored_user());
        form.new_password = "nova123".into();
        form.confirm_password = "nova123".into();
        assert_eq!(
            form.check().unwrap_err().get("currentPassword"),
            Some(MSG_CURRENT_PASSWORD)
        );

        form.current_password = "antiga".into();
        assert!(form.check().is_ok());
        assert_eq!(
            form.password_change(7),
            Some(PasswordChange {
                user_id: 7,
                current_password: Some("antiga".into()),
                new_password: "nova123".into(),
            })
        );
    }

    #[test]
    fn editing_masks_stored_values_and_clears_passwords() {
        let form = UserForm::from_record(&stored_user());
        assert_eq!(form.phone_number, "(11) 98765-4321");
        assert_eq!(form.cnpj_cpf, "123.456.789-01");
        assert_eq!(form.role, Some(Role::Manager));
        assert!(form.new_password.is_empty());
    }

    #[test]
    fn edit_submit_emits_update_and_password_change() {
        let mut modal: Modal<UserForm> = Modal::new();
        modal.open_edit(stored_user());
        modal.form_mut().new_password = "nova123".into();
        modal.form_mut().confirm_password = "nova123".into();

        let Submission::Update { id, payload } = modal.submit().unwrap() else {
            panic!("esperava atualização");
        };
        assert_eq!(id, 7);
        assert_eq!(payload.password, "");
        assert_eq!(payload.role, "Gerente");
        assert_eq!(
            modal.form().password_change(7).map(|c| c.current_password),
            Some(None)
        );

        modal.close();
        assert!(!modal.is_open());
        assert!(modal.form().new_password.is_empty());
    }

    #[test]
    fn invalid_submit_keeps_modal_open() {
        let mut modal: Modal<UserForm> = Modal::new();
        modal.open_create();
        assert!(!modal.can_submit());
        assert!(modal.submit().is_err());
        assert!(modal.is_open());
        assert_eq!(modal.errors().get("email"), Some(MSG_REQUIRED));
    }

    #[test]
    fn create_submit_uses_typed_role() {
        let mut modal: Modal<UserForm> = Modal::new();
        modal.open_create();
        *modal.form_mut() = filled();
        modal.form_mut().role = Some(Role::Sales);

        match modal.submit().unwrap() {
            Submission::Create(payload) => assert_eq!(payload.role, Role::Sales),
            Submission::Update { .. } => panic!("esperava criação"),
        }
    }
}
