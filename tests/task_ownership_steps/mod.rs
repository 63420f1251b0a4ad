//! Step definitions for owner-scoped task isolation behaviour tests.


mod given;
