mod tutorial_dto;

pub use tutorial_dto::{CreateTutorialDto, ListTutorialsQuery, TutorialResponseDto};
