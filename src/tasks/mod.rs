pub mod watch_loop;
