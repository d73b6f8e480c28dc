mod slots_test;
mod week_test;
