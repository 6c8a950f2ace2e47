mod test_register_unknown_rejected;
mod test_unregistered_message_dropped;
