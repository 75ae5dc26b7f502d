use std::future::{ready, Ready};

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header,
    Error, HttpMessage, HttpResponse,
};
use futures::future::LocalBoxFuture;

use crate::modules::auth::adapter::incoming::web::extractors::auth::SESSION_COOKIE;

const LOGIN_PATH: &str = "/admin/login";

/// Gate for the admin UI scope: any request without the session cookie is
/// redirected to the login route (the login route itself excepted).
///
/// Presence check only. Token verification happens in the `AdminSession`
/// extractor on the API routes that actually mutate data.
pub struct AdminGate;

impl<S, B> Transform<S, ServiceRequest> for AdminGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AdminGateMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AdminGateMiddleware { service }))
    }
}

pub struct AdminGateMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for AdminGateMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let has_session = req.cookie(SESSION_COOKIE).is_some();
        let is_login_route = req.path() == LOGIN_PATH;

        if !has_session && !is_login_route {
            let (request, _payload) = req.into_parts();
            let response = HttpResponse::Found()
                .insert_header((header::LOCATION, LOGIN_PATH))
                .finish()
                .map_into_right_body();

            return Box::pin(async move { Ok(ServiceResponse::new(request, response)) });
        }

        let fut = self.service.call(req);
        Box::pin(async move { fut.await.map(|res| res.map_into_left_body()) })
    }
}
