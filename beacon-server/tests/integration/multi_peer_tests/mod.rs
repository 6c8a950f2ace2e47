mod test_room_full_rejected;
