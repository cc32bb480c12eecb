use serde::{Deserialize, Serialize};

/// Сессия продавца в дашборде
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerSession {
    /// Идентификатор вида "s-1a2b3c4d5"
    pub id: String,
    pub email: String,
    /// Отображаемое имя (локальная часть email)
    pub name: String,
}

/// DTO формы входа
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub remember_me: bool,
}

/// DTO формы регистрации продавца
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    pub company_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    #[serde(default)]
    pub website: String,
    pub agree_terms: bool,
    #[serde(default)]
    pub receive_updates: bool,
}

/// DTO смены пароля в настройках
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChangeRequest {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}
