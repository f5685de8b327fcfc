mod file_dto;

pub use file_dto::{
    file_extension, CreateFileDto, FileResponseDto, ListFilesQuery, UploadFileDto,
};
