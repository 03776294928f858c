mod upload_dto;

pub use upload_dto::{MediaRecordDto, UploadRequestDto, UploadResponseDto};
