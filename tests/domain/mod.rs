mod storage_key_test;
mod structured_output_test;
mod uploaded_file_test;
