mod collection_find_negative_test;
mod find_test;
mod insert_test;
