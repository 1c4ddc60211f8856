pub mod accounts;
pub mod practice;
pub mod typescript_gen;

pub use typescript_gen::generate_typescript_definitions;

pub use accounts::{
    Certificate, CertificateVerification, LoginRequest, MarkCompletedRequest, MessageResponse,
    ProgressResponse, RegisterRequest, SaveQuizScoreRequest, SaveQuizScoreResponse, UserRecord,
};
pub use practice::{
    ColumnDescriptor, ExecuteQueryRequest, ExecuteQueryResponse, PracticeErrorResponse,
    SampleQueriesResponse, SampleQuery, SchemaResponse,
};
