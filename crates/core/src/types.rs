/// Job identifiers are opaque strings issued by the server.
pub type JobId = String;

/// Company identifiers are opaque strings issued by the server.
pub type CompanyId = String;
