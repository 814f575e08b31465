// tests/crud_pages.rs

mod common;

use axum::{
    extract::Path,
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use backoffice::{
    common::error::{AppError, MSG_SERVER},
    forms::LookupForm,
    models::{
        lookup::UnitMeasures,
        party::Customer,
        resource::Record,
    },
    pages::{CrudPage, CustomersPage, Stats, ToastLevel},
    table::{ColumnKey, TableEvent},
};
use common::{harness, offline, serve, sign_in};

type UnitMeasuresPage = CrudPage<LookupForm<UnitMeasures>>;

fn unit(id: i64, name: &str, active: bool) -> Value {
    json!({ "id": id, "name": name, "description": format!("Unidade {name}"), "active": active })
}

fn unit_measures_backend() -> Router {
    Router::new()
        .route(
            "/config/unit-measures",
            get(|| async { Json(json!([unit(1, "KG", true), unit(2, "LT", false)])) }).post(
                |Json(body): Json<Value>| async move {
                    Json(json!({
                        "id": 3,
                        "name": body["name"],
                        "description": body["description"],
                        "active": true
                    }))
                },
            ),
        )
        .route(
            "/config/unit-measures/{id}",
            put(|Path(id): Path<i64>, Json(body): Json<Value>| async move {
                Json(json!({
                    "id": id,
                    "name": body["name"],
                    "description": body["description"],
                    "active": body["active"]
                }))
            })
            .delete(|| async { StatusCode::NO_CONTENT }),
        )
}

fn ids<T: Record>(records: &[T]) -> Vec<i64> {
    records.iter().filter_map(Record::id).collect()
}

#[tokio::test]
async fn full_lifecycle_patches_the_list_locally() {
    let h = harness(&serve(unit_measures_backend()).await);
    sign_in(&h.session, "Administrador");
    let mut page = UnitMeasuresPage::new(h.api.clone());

    page.load().await.unwrap();
    assert_eq!(page.stats(), Stats { total: 2, active: 1, inactive: 1 });

    // a busca digitada sobrevive às atualizações locais
    page.table_mut().on_search("unidade");

    page.dispatch(TableEvent::Create).await.unwrap();
    {
        let form = page.modal_mut().form_mut();
        form.name = "CX".into();
        form.description = "Caixa".into();
    }
    let created = page.save().await.unwrap();
    assert_eq!(created.id, Some(3));
    assert!(!page.modal().is_open());
    assert_eq!(ids(page.records()), vec![1, 2, 3]);
    assert_eq!(page.toasts().last().unwrap().message, "Unidade de medida criada com sucesso!");
    assert_eq!(page.table().state().search_term, "unidade");

    let kg = page.records()[0].clone();
    page.dispatch(TableEvent::ToggleStatus(kg)).await.unwrap();
    assert!(!page.records()[0].active);
    assert_eq!(page.stats(), Stats { total: 3, active: 1, inactive: 2 });
    assert_eq!(page.toasts().last().unwrap().message, "Unidade de medida atualizada com sucesso!");

    let lt = page.records()[1].clone();
    page.dispatch(TableEvent::Delete(lt)).await.unwrap();
    assert!(page.confirm().is_open());
    page.confirm_delete().await.unwrap();
    assert!(!page.confirm().is_open());
    assert_eq!(ids(page.records()), vec![1, 3]);
    assert_eq!(page.toasts().last().unwrap().message, "Unidade de medida deletada com sucesso!");
}

#[tokio::test]
async fn edit_replaces_record_in_place() {
    let h = harness(&serve(unit_measures_backend()).await);
    let mut page = UnitMeasuresPage::new(h.api.clone());
    page.load().await.unwrap();

    let lt = page.records()[1].clone();
    page.dispatch(TableEvent::Edit(lt)).await.unwrap();
    assert!(page.modal().is_edit_mode());
    page.modal_mut().form_mut().description = "Litro".into();

    page.save().await.unwrap();
    assert_eq!(ids(page.records()), vec![1, 2]);
    assert_eq!(page.records()[1].description, "Litro");
    assert_eq!(page.table().page_cells()[1][2], "Litro");
}

#[tokio::test]
async fn invalid_form_is_blocked_before_the_network() {
    let h = offline();
    let mut page = UnitMeasuresPage::new(h.api.clone());

    page.dispatch(TableEvent::Create).await.unwrap();
    page.modal_mut().form_mut().description = "ab".into();

    let err = page.save().await.unwrap_err();
    let AppError::InvalidForm(fields) = &err else {
        panic!("esperava formulário inválido, veio {err:?}");
    };
    assert!(fields.get("name").is_some());
    assert!(fields.get("description").is_some());
    assert!(page.modal().is_open());
    assert!(page.toasts().is_empty());
}

#[tokio::test]
async fn failed_save_keeps_modal_open_with_toast() {
    let app = Router::new().route(
        "/config/unit-measures",
        get(|| async { Json(json!([])) }).post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let h = harness(&serve(app).await);
    let mut page = UnitMeasuresPage::new(h.api.clone());
    page.load().await.unwrap();

    page.modal_mut().open_create();
    *page.modal_mut().form_mut() = LookupForm::new("UN", "Unidade");

    assert!(matches!(page.save().await, Err(AppError::Server { .. })));
    assert!(page.modal().is_open());
    assert!(page.records().is_empty());
    let toast = page.toasts().last().unwrap();
    assert_eq!(toast.level, ToastLevel::Error);
    assert_eq!(toast.message, MSG_SERVER);
}

fn customer(id: i64, city: &str) -> Customer {
    Customer {
        id: Some(id),
        name: format!("Cliente {id}"),
        cnpj_cpf: "12345678000199".into(),
        phone_number: "11987654321".into(),
        contact_name: "Contato".into(),
        email: format!("c{id}@empresa.com"),
        address: "Rua B, 20".into(),
        city: city.into(),
        uf: "SP".into(),
        active: true,
        customer_type: "Corporativo".into(),
        registered_at: None,
        updated_at: None,
    }
}

#[tokio::test]
async fn customers_cannot_be_deleted() {
    let h = offline();
    let mut page = CustomersPage::new(h.api.clone());
    page.set_records(vec![customer(1, "Campinas"), customer(2, "Santos")]);

    page.request_delete(page.records()[0].clone());
    let err = page.confirm_delete().await.unwrap_err();

    assert!(matches!(err, AppError::Unsupported(_)));
    assert!(!page.confirm().is_open());
    assert_eq!(page.records().len(), 2);
    assert_eq!(page.toasts().last().unwrap().message, "Erro ao deletar cliente. Tente novamente.");
}

#[tokio::test]
async fn table_filters_customers_by_city() {
    let h = offline();
    let mut page = CustomersPage::new(h.api.clone());
    page.set_records(vec![customer(1, "Campinas"), customer(2, "Santos"), customer(3, "Campinas")]);

    page.table_mut().on_filter(&ColumnKey::field("city"), "campinas");
    let visible: Vec<i64> = page.table().filtered().iter().filter_map(|c| c.id).collect();
    assert_eq!(visible, vec![1, 3]);
}

#[tokio::test]
async fn cancelled_delete_sends_nothing() {
    let h = offline();
    let mut page = UnitMeasuresPage::new(h.api.clone());
    page.set_records(vec![serde_json::from_value(unit(1, "KG", true)).unwrap()]);

    page.request_delete(page.records()[0].clone());
    page.cancel_delete();
    page.confirm_delete().await.unwrap();

    assert_eq!(page.records().len(), 1);
    assert!(page.toasts().is_empty());
}
