mod tutorial_service;

pub use tutorial_service::TutorialService;
