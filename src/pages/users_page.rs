// src/pages/users_page.rs

use super::crud_page::CrudPage;
use crate::{
    common::error::AppError,
    forms::UserForm,
    models::{
        resource::Record,
        user::{PasswordChange, User},
    },
    services::{ApiClient, UserService},
};

const MSG_PASSWORD_CHANGED: &str = "Senha alterada com sucesso!";
const MSG_PASSWORD_FAILED: &str = "Erro ao alterar senha. Tente novamente.";

/// Página de usuários: o CRUD genérico mais troca de senha e edição do
/// próprio perfil.
pub struct UsersPage {
    page: CrudPage<UserForm>,
    users: UserService,
}

impl UsersPage {
    pub fn new(api: ApiClient) -> Self {
        Self {
            users: UserService::new(api.clone()),
            page: CrudPage::new(api),
        }
    }

    pub fn page(&self) -> &CrudPage<UserForm> {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut CrudPage<UserForm> {
        &mut self.page
    }

    pub async fn load(&mut self) -> Result<(), AppError> {
        self.page.load().await
    }

    /// Abre o modal com o perfil do usuário logado.
    pub async fn open_profile(&mut self, username: &str) -> Result<(), AppError> {
        let user = match self.users.find_by_username(username).await {
            Ok(user) => user,
            Err(e) => {
                self.page
                    .toasts_mut()
                    .error(e.toast_message("Erro ao carregar perfil"));
                return Err(e);
            }
        };
        let form = UserForm::profile(&user);
        self.page.modal_mut().open_with(Some(user), form);
        Ok(())
    }

    /// Salva o formulário e, se a edição trouxe nova senha, troca a senha
    /// em seguida.
    pub async fn save(&mut self) -> Result<User, AppError> {
        let modal = self.page.modal();
        let change = modal
            .editing()
            .and_then(Record::id)
            .and_then(|id| modal.form().password_change(id));

        let user = self.page.save().await?;

        if let Some(change) = change {
            self.change_password(change).await?;
        }
        Ok(user)
    }

    pub async fn change_password(&mut self, change: PasswordChange) -> Result<(), AppError> {
        match self
            .users
            .update_password(change.user_id, &change.new_password)
            .await
        {
            Ok(()) => {
                self.page.toasts_mut().success(MSG_PASSWORD_CHANGED);
                Ok(())
            }
            Err(e) => {
                self.page.toasts_mut().error(e.toast_message(MSG_PASSWORD_FAILED));
                Err(e)
            }
        }
    }
}
