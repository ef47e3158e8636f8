//! Operations behind the `sprout` command.
//!
//! [`ops_new`] runs the scaffolding pipeline and [`ops_install`] runs the
//! package manager inside the new project.

pub mod ops_install;
pub mod ops_new;
