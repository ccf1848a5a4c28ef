mod fixed_size_splitter_test;
mod pdf_adapter_test;
