//! Single-player snake: the engine, its session loop and the small amount of
//! plumbing (config, storage, logging) a front end needs around it.

pub mod config;
pub mod games;
pub mod logger;
pub mod storage;
