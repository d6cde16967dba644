use super::*;

mod clear;
mod fire;
mod guild_isolation;
