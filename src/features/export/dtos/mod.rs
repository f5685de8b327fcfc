mod export_dto;

pub use export_dto::{ExportDataDto, ExportDocumentDto, ExportFileDto, ExportStatisticsDto};
