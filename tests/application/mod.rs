mod index_synchronizer_test;
mod response_synthesizer_test;
mod upload_service_test;
