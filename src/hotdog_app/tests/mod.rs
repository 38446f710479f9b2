mod app_test;
