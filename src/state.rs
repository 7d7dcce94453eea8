use std::sync::Arc;
use crate::domain::ports::{LiveClassRepository, TutorService, UserRepository};
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub live_class_repo: Arc<dyn LiveClassRepository>,
    pub user_repo: Arc<dyn UserRepository>,
    pub tutor_service: Arc<dyn TutorService>,
}
