use crate::{data::KnowledgeFile, service::knowledge::KnowledgeService};
