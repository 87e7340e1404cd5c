use actix_web::{web, HttpResponse, Responder};

pub async fn ping() -> impl Responder {
    HttpResponse::Ok().body("pong")
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.route("/ping", web::get().to(ping));
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn ping_answers_pong() {
        let app = test::init_service(App::new().configure(init)).await;
        let req = test::TestRequest::get().uri("/ping").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        assert_eq!(test::read_body(resp).await, "pong");
    }
}
