//! Window construction and lifecycle tests against a fake platform


mod construction;
mod lifecycle;
