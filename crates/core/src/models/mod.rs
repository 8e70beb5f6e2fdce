pub mod time_slot;
