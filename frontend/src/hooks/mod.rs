pub mod use_shell_state;
