mod message_store;
