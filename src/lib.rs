//! Client side of a portfolio website's contact form.
//!
//! A [`form::FieldStore`] collects input, [`submission::SubmissionController`]
//! validates and sends it through a [`backend::ContactBackend`], and a
//! [`notify::NotificationSink`] reports the outcome. The
//! [`resume::ResumeLauncher`] retrieves the resume document.

pub mod backend;
pub mod cli;
pub mod commands;
pub mod config;
pub mod form;
pub mod logging;
pub mod notify;
pub mod resume;
pub mod submission;
