/// Email looked up by `find-user` when `LOOKUP_EMAIL` is not set.
pub const DEFAULT_LOOKUP_EMAIL: &str = "admin@example.com";

/// Plaintext checked by `check-password`.
pub const CHECK_PASSWORD: &str = "abc";

/// Stored bcrypt hash `check-password` compares against.
pub const CHECK_PASSWORD_HASH: &str = "$2a$06$If6bvum7DFjUnE9p2uDeDu0YHzrHM6tf.iqN8.yx.jNN1ILEf7h0i";
