mod answers;
mod classes;
mod marking;
mod principles;
mod questions;
mod students;
