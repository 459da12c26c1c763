pub mod coffee_shop;
pub mod fyyur;
pub mod health;
pub mod trivia;

use axum::Router;
use trio_core::service::Service;

use crate::state::AppState;

/// Build the route tree for one service.
///
/// ```text
/// fyyur (5000)
///   /venues                      list (GET), create (POST)
///   /venues/search               search (POST)
///   /venues/{id}                 get, update (PATCH), delete
///   /artists                     list (GET), create (POST)
///   /artists/search              search (POST)
///   /artists/{id}                get, update (PATCH), delete
///   /shows                       list (GET), create (POST)
///
/// trivia (5001)
///   /categories                  list
///   /categories/{id}/questions   paged list
///   /questions                   paged list (GET), create (POST)
///   /questions/search            paged search (POST)
///   /questions/{id}              delete
///   /quizzes                     next question (POST)
///
/// coffee shop (5002)
///   /drinks                      short list (GET), create (POST, post:drinks)
///   /drinks-detail               long list (get:drinks-detail)
///   /drinks/{id}                 update (PATCH, patch:drinks), delete (delete:drinks)
/// ```
pub fn service_routes(service: Service) -> Router<AppState> {
    match service {
        Service::Fyyur => fyyur::router(),
        Service::Trivia => trivia::router(),
        Service::CoffeeShop => coffee_shop::router(),
    }
}
