//! Router-level integration tests backed by a live Postgres.
//!
//! Each test drives the full application (extractors, services,
//! repositories) through `tower::ServiceExt::oneshot`. The suite needs a
//! reachable database and skips itself when neither
//! `TRACKHUB_TEST_DATABASE_URL` nor `DATABASE_URL` is set.

mod helpers;

mod auth_test;
mod ingestion_test;
mod invitation_test;
mod isolation_test;
