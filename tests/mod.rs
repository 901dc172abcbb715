mod gateway_http;
