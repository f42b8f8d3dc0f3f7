use crate::auth::auth::AuthUser;
use crate::model::menu::{MenuItem, menu_for};
use crate::model::role::{Capability, Role};
use actix_web::{HttpResponse, Responder};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct MenuResponse {
    pub role: Role,
    pub capabilities: Vec<Capability>,
    pub items: Vec<MenuItem>,
}

/// Dashboard menu for the calling user
#[utoipa::path(
    get,
    path = "/api/menu",
    responses(
        (status = 200, description = "Menu entries visible to the caller's role", body = MenuResponse),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Menu"
)]
pub async fn menu(auth: AuthUser) -> impl Responder {
    HttpResponse::Ok().json(MenuResponse {
        role: auth.role,
        capabilities: auth.role.capabilities(),
        items: menu_for(auth.role),
    })
}

#[cfg(test)]
mod tests {
    use crate::auth::jwt::TokenType;
    use crate::auth::jwt::tests::{SECRET, mint};
    use crate::auth::middleware::auth_middleware;
    use crate::config::Config;
    use actix_web::middleware::from_fn;
    use actix_web::{App, test, web};
    use serde_json::{Value, json};

    #[actix_web::test]
    async fn menu_follows_role() {
        let config = Config {
            jwt_secret: SECRET.to_string(),
            server_addr: "127.0.0.1:0".to_string(),
            rate_protected_per_min: 1000,
            api_prefix: "/api".to_string(),
            log_dir: "logs".to_string(),
            log_level: tracing::Level::DEBUG,
        };
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(config))
                .service(
                    web::scope("/api")
                        .wrap(from_fn(auth_middleware))
                        .route("/menu", web::get().to(super::menu)),
                ),
        )
        .await;

        let token = format!("Bearer {}", mint(4, TokenType::Access, 900));
        let req = test::TestRequest::get()
            .uri("/api/menu")
            .insert_header(("Authorization", token))
            .to_request();
        let resp: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(resp["role"], "EMPLOYEE");
        let keys: Vec<_> = resp["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|i| i["key"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(keys, vec!["dashboard", "attendance", "leave", "tasks", "payslips", "sales"]);
        assert!(resp["items"][0].get("requires").is_none());
        assert!(resp["capabilities"].as_array().unwrap().contains(&json!("apply_leave")));
    }
}
